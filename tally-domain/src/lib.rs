#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::GroupBuildError;
pub use model::{
    AmountLimits, ExpenseLine, Group, GroupSettlement, Member, MemberAmounts, PersonBalance,
    RESIDUAL_TOLERANCE, Transaction, Transfer,
};
pub use services::{BalanceCalculator, SettlementCalculator};
