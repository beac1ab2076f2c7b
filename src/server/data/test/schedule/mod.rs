use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::schedule::ScheduleFactory};

use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{ScheduleFilter, ScheduleParams},
};

mod get_paginated;
