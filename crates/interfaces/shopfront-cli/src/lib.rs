pub mod commands;
pub mod console;

use clap::ValueEnum;
use shopfront_core::PaymentMethod;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliPayment {
    Card,
    Cash,
}

impl From<CliPayment> for PaymentMethod {
    fn from(p: CliPayment) -> Self {
        match p {
            CliPayment::Card => PaymentMethod::Card,
            CliPayment::Cash => PaymentMethod::Cash,
        }
    }
}
