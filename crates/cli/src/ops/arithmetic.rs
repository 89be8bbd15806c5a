use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use calc_client::error::ApiError;
use calc_client::prelude::{Calculation, OperandPair};

use crate::args::Op;
use crate::AppState;

#[derive(Debug, clap::Args, Clone, Copy)]
pub struct Operands {
    /// First operand
    #[arg(allow_negative_numbers = true)]
    num1: f64,
    /// Second operand
    #[arg(allow_negative_numbers = true)]
    num2: f64,
}

impl From<Operands> for OperandPair {
    fn from(operands: Operands) -> Self {
        OperandPair::new(operands.num1, operands.num2)
    }
}

/// Add two numbers
#[derive(Debug, clap::Args, Clone)]
pub struct Add {
    #[command(flatten)]
    operands: Operands,
}

/// Subtract the second number from the first
#[derive(Debug, clap::Args, Clone)]
pub struct Subtract {
    #[command(flatten)]
    operands: Operands,
}

/// Multiply two numbers
#[derive(Debug, clap::Args, Clone)]
pub struct Multiply {
    #[command(flatten)]
    operands: Operands,
}

/// Divide the first number by the second
#[derive(Debug, clap::Args, Clone)]
pub struct Divide {
    #[command(flatten)]
    operands: Operands,
}

#[derive(Debug, thiserror::Error)]
pub enum CalculateError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The server's answer, typed when it looks like a calculation record
#[derive(Debug)]
pub enum CalculationOutput {
    Record(Calculation),
    Raw(Value),
}

impl From<Value> for CalculationOutput {
    fn from(value: Value) -> Self {
        match Calculation::from_value(&value) {
            Some(calc) => CalculationOutput::Record(calc),
            None => CalculationOutput::Raw(value),
        }
    }
}

impl fmt::Display for CalculationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationOutput::Record(calc) => write!(f, "{}", calc),
            CalculationOutput::Raw(value) => write!(f, "{}", value),
        }
    }
}

#[async_trait]
impl Op for Add {
    type Error = CalculateError;
    type Output = CalculationOutput;

    async fn execute(&self, state: &AppState) -> Result<Self::Output, Self::Error> {
        let response = state.client().add(self.operands.into()).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl Op for Subtract {
    type Error = CalculateError;
    type Output = CalculationOutput;

    async fn execute(&self, state: &AppState) -> Result<Self::Output, Self::Error> {
        let response = state.client().subtract(self.operands.into()).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl Op for Multiply {
    type Error = CalculateError;
    type Output = CalculationOutput;

    async fn execute(&self, state: &AppState) -> Result<Self::Output, Self::Error> {
        let response = state.client().multiply(self.operands.into()).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl Op for Divide {
    type Error = CalculateError;
    type Output = CalculationOutput;

    async fn execute(&self, state: &AppState) -> Result<Self::Output, Self::Error> {
        let response = state.client().divide(self.operands.into()).await?;
        Ok(response.into())
    }
}
