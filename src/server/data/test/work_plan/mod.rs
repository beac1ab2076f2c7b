use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::work_plan::WorkPlanFactory};

use crate::{
    model::work_plan::WorkPlanStatus,
    server::{data::work_plan::WorkPlanRepository, model::work_plan::WorkPlanParams},
};

mod set_status;
