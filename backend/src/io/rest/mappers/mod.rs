pub mod transaction_mapper;
