use crate::error::ZyntroError;

pub type ZyntroResult<T> = Result<T, ZyntroError>;
