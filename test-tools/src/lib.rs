pub mod accounts;
pub mod rpc_transport_stub;
pub mod transaction_sender_stub;
