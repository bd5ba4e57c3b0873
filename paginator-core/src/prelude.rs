pub use crate::error::{Error, InvalidArgumentReason};
pub use crate::page::{PageRequest, PageResult, Slice};
pub use crate::paginator::{
    get_page, get_page_mapped, get_page_with, get_paginated_result, get_paginated_result_in_memory,
    get_paginated_result_mapped, get_paginated_result_with, paginate, paginate_request,
};
pub use crate::source::{PageSource, VecSource};
