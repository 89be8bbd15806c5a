use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use calc_client::error::ApiError;
use calc_client::prelude::Calculation;

use crate::args::Op;
use crate::AppState;

/// Show previously recorded calculations, newest first
#[derive(Debug, clap::Args, Clone)]
pub struct History {}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug)]
pub enum HistoryOutput {
    Records(Vec<Calculation>),
    Raw(Value),
}

impl From<Value> for HistoryOutput {
    fn from(value: Value) -> Self {
        match Calculation::list_from_value(&value) {
            Some(calcs) => HistoryOutput::Records(calcs),
            None => HistoryOutput::Raw(value),
        }
    }
}

impl fmt::Display for HistoryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryOutput::Records(calcs) if calcs.is_empty() => {
                write!(f, "No calculations recorded")
            }
            HistoryOutput::Records(calcs) => {
                let mut lines = calcs.iter().peekable();
                while let Some(calc) = lines.next() {
                    write!(f, "[{}] {}", calc.recorded_at_rfc3339(), calc)?;
                    if lines.peek().is_some() {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
            HistoryOutput::Raw(value) => write!(f, "{}", value),
        }
    }
}

#[async_trait]
impl Op for History {
    type Error = HistoryError;
    type Output = HistoryOutput;

    async fn execute(&self, state: &AppState) -> Result<Self::Output, Self::Error> {
        let response = state.client().history().await?;
        Ok(response.into())
    }
}
