use crate::{
    model::notification::NotificationKind,
    server::{
        error::AppError,
        model::notification::NewNotification,
        service::notification::{hub::NotificationHub, NotificationService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod notify;
