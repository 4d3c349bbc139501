use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    UexError(#[from] uex::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
