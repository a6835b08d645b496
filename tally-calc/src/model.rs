/// One transfer that settles part of the group's balances.
///
/// The member at index `from` (a debtor) pays `amount` to the member at index
/// `to` (a creditor). Indices refer to the balance slice the action was
/// computed from. `amount` is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowAction {
    pub amount: f64,
    pub from: usize,
    pub to: usize,
}

/// Result of a full settlement run.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    pub actions: Vec<CashFlowAction>,
    /// Working balances after the last action was applied
    pub residual: Vec<f64>,
}
