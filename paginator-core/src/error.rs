#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[from]
    #[display("invalid pagination argument: {reason}")]
    InvalidArgument { reason: InvalidArgumentReason },
}

impl Error {
    pub fn reason(&self) -> &InvalidArgumentReason {
        match self {
            Self::InvalidArgument { reason } => reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidArgumentReason {
    #[display("cannot paginate with negative page size {page_size}")]
    NegativePageSize { page_size: i64 },
    #[display("cannot get page {page}, pages start at 1")]
    PageBelowOne { page: i64 },
    #[display("offset of page {page} with page size {page_size} overflows")]
    OffsetOverflow { page: i64, page_size: i64 },
    #[display("cannot paginate without a page request")]
    MissingRequest,
}
