use crate::server::{
    error::AppError, model::department::DepartmentParams, service::department::DepartmentService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn params(name: &str, code: &str, parent_id: Option<i32>) -> DepartmentParams {
    DepartmentParams {
        name: name.to_string(),
        code: code.to_string(),
        parent_id,
        description: None,
    }
}
