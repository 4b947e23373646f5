pub(crate) mod handlers;
pub(crate) mod response_contract;
