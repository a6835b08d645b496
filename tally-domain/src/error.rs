use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupBuildError {
    #[error("Member '{email}' is listed more than once")]
    DuplicateMember { email: String },
    #[error("Transaction '{transaction}' references '{email}', who is not a group member")]
    UnknownMember { transaction: String, email: String },
    #[error("Transaction '{transaction}' has a non-finite amount for '{email}'")]
    NonFiniteAmount { transaction: String, email: String },
}
