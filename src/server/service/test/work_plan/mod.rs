use chrono::{Duration, Utc};

use crate::{
    model::{notification::NotificationKind, work_plan::WorkPlanStatus},
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        model::work_plan::WorkPlanParams,
        service::{notification::hub::NotificationHub, work_plan::WorkPlanService},
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, work_plan::WorkPlanFactory},
};

mod lifecycle;
