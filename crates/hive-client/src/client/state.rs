//! Execution handle tracking.

use hive_thrift::TOperationHandle;

use crate::error::{HiveError, HiveResult};

/// The one query execution the adapter may have in flight.
///
/// Starts `Idle`. Only a successful `execute` moves it to `Active`,
/// replacing any previously held handle; fetches never change it, and
/// a failed `execute` leaves it untouched. There is no terminal state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExecutionState {
    /// No query has been successfully submitted yet
    #[default]
    Idle,

    /// A submitted query whose result set can be fetched
    Active(TOperationHandle),
}

impl ExecutionState {
    /// Handle of the active execution.
    pub fn handle(&self) -> HiveResult<&TOperationHandle> {
        match self {
            ExecutionState::Active(handle) => Ok(handle),
            ExecutionState::Idle => Err(HiveError::NoActiveExecution),
        }
    }

    /// Store the handle of a newly accepted execution.
    pub fn activate(&mut self, handle: TOperationHandle) {
        *self = ExecutionState::Active(handle);
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ExecutionState::Active(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_thrift::{THandleIdentifier, TOperationType};

    fn handle(tag: u8) -> TOperationHandle {
        TOperationHandle {
            operation_id: THandleIdentifier {
                guid: vec![tag; 16],
                secret: vec![0; 16],
            },
            operation_type: TOperationType::EXECUTE_STATEMENT,
            has_result_set: true,
            modified_row_count: None,
        }
    }

    #[test]
    fn test_idle_has_no_handle() {
        let state = ExecutionState::Idle;
        assert!(!state.is_active());
        assert!(matches!(state.handle(), Err(HiveError::NoActiveExecution)));
    }

    #[test]
    fn test_activate_replaces_previous_handle() {
        let mut state = ExecutionState::default();
        state.activate(handle(1));
        state.activate(handle(2));
        let current = state.handle().unwrap();
        assert_eq!(current.operation_id.guid, vec![2; 16]);
    }
}
