pub const ERR_ADMIN_ONLY: &str = "Admin rights required";
pub const ERR_NOT_STAKEHOLDER: &str = "Must be a stakeholder to vote";
pub const ERR_DEPOSIT_BELOW_MINIMUM: &str = "Deposit below minimum threshold";
pub const ERR_SPENDING_NOT_FOUND: &str = "Spending not found";
pub const ERR_ALREADY_EXECUTED: &str = "Spending already executed";
pub const ERR_QUORUM_NOT_MET: &str = "Spending has not met the minimum vote percent";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";
pub const ERR_ZERO_AMOUNT: &str = "Spending amount must be positive";
pub const ERR_INVALID_QUORUM: &str = "Invalid quorum";
pub const ERR_INVALID_MIN_DEPOSIT: &str = "Invalid minimum deposit";
