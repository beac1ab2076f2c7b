use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
        document::{
            AssignmentDto, ChangeStatusDto, CommentDto, CreateDocumentDto, DistributeDocumentDto,
            DocumentDetailsDto, DocumentDto, DocumentKind, DocumentStatus,
            DocumentWithRelationsDto, HistoryAction, HistoryEntryDto, RegisterDocumentDto,
            SecurityLevel, UpdateDocumentDto,
        },
        equipment::{
            EquipmentCategory, EquipmentCondition, EquipmentDto, TransferEquipmentDto,
            UpsertEquipmentDto,
        },
        notification::{MarkedReadDto, NotificationDto, NotificationKind, UnreadCountDto},
        schedule::{ScheduleDto, UpsertScheduleDto},
        user::{CreateUserDto, RoleKind, SetActiveDto, SetRolesDto, TokenDto, UpdateUserDto, UserDto},
        work_plan::{UpsertWorkPlanDto, WorkPlanDto, WorkPlanStatus},
    },
    server::{
        controller::{department, document, equipment, notification, schedule, user, work_plan},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chancery API",
        description = "Document workflow, scheduling and inventory for a military unit"
    ),
    paths(
        department::create_department,
        department::get_departments,
        department::get_department_by_id,
        department::update_department,
        department::delete_department,
        department::get_department_documents,
        user::create_user,
        user::get_users,
        user::get_current_user,
        user::get_user_by_id,
        user::update_user,
        user::set_user_roles,
        user::set_user_active,
        user::issue_user_token,
        document::create_document,
        document::get_documents,
        document::get_document_by_id,
        document::update_document,
        document::delete_document,
        document::get_document_history,
        document::register_document,
        document::distribute_document,
        document::change_document_status,
        document::send_document,
        document::archive_document,
        notification::get_notifications,
        notification::get_unread_count,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::stream_notifications,
        schedule::create_schedule,
        schedule::get_schedules,
        schedule::get_schedule_by_id,
        schedule::update_schedule,
        schedule::delete_schedule,
        work_plan::create_work_plan,
        work_plan::get_work_plans,
        work_plan::get_work_plan_by_id,
        work_plan::update_work_plan,
        work_plan::delete_work_plan,
        work_plan::approve_work_plan,
        work_plan::start_work_plan,
        work_plan::complete_work_plan,
        equipment::create_equipment,
        equipment::get_equipment,
        equipment::get_equipment_by_id,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::transfer_equipment,
    ),
    components(schemas(
        ErrorDto,
        DepartmentDto,
        CreateDepartmentDto,
        UpdateDepartmentDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        SetRolesDto,
        SetActiveDto,
        TokenDto,
        RoleKind,
        DocumentDto,
        DocumentDetailsDto,
        DocumentWithRelationsDto,
        AssignmentDto,
        HistoryEntryDto,
        CreateDocumentDto,
        UpdateDocumentDto,
        RegisterDocumentDto,
        DistributeDocumentDto,
        ChangeStatusDto,
        CommentDto,
        DocumentKind,
        DocumentStatus,
        SecurityLevel,
        HistoryAction,
        NotificationDto,
        NotificationKind,
        UnreadCountDto,
        MarkedReadDto,
        ScheduleDto,
        UpsertScheduleDto,
        WorkPlanDto,
        UpsertWorkPlanDto,
        WorkPlanStatus,
        EquipmentDto,
        UpsertEquipmentDto,
        TransferEquipmentDto,
        EquipmentCategory,
        EquipmentCondition,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "department", description = "Organizational structure"),
        (name = "user", description = "Users, roles and bearer tokens"),
        (name = "document", description = "Correspondence and its workflow"),
        (name = "notification", description = "In-app notifications"),
        (name = "schedule", description = "Unit schedule"),
        (name = "work-plan", description = "Department work plans"),
        (name = "equipment", description = "Equipment inventory"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by every secured path.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearer".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/admin/users/{id}/token"))
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route(
            "/departments",
            get(department::get_departments).post(department::create_department),
        )
        .route(
            "/departments/{id}",
            get(department::get_department_by_id)
                .put(department::update_department)
                .delete(department::delete_department),
        )
        .route(
            "/departments/{id}/documents",
            get(department::get_department_documents),
        )
        .route("/users", get(user::get_users).post(user::create_user))
        .route("/users/me", get(user::get_current_user))
        .route(
            "/users/{id}",
            get(user::get_user_by_id).put(user::update_user),
        )
        .route("/users/{id}/roles", put(user::set_user_roles))
        .route("/users/{id}/active", put(user::set_user_active))
        .route("/admin/users/{id}/token", post(user::issue_user_token))
        .route(
            "/documents",
            get(document::get_documents).post(document::create_document),
        )
        .route(
            "/documents/{id}",
            get(document::get_document_by_id)
                .put(document::update_document)
                .delete(document::delete_document),
        )
        .route("/documents/{id}/history", get(document::get_document_history))
        .route("/documents/{id}/register", post(document::register_document))
        .route(
            "/documents/{id}/distribute",
            post(document::distribute_document),
        )
        .route("/documents/{id}/status", post(document::change_document_status))
        .route("/documents/{id}/send", post(document::send_document))
        .route("/documents/{id}/archive", post(document::archive_document))
        .route("/notifications", get(notification::get_notifications))
        .route(
            "/notifications/unread-count",
            get(notification::get_unread_count),
        )
        .route(
            "/notifications/{id}/read",
            post(notification::mark_notification_read),
        )
        .route(
            "/notifications/read-all",
            post(notification::mark_all_notifications_read),
        )
        .route(
            "/notifications/stream",
            get(notification::stream_notifications),
        )
        .route(
            "/schedules",
            get(schedule::get_schedules).post(schedule::create_schedule),
        )
        .route(
            "/schedules/{id}",
            get(schedule::get_schedule_by_id)
                .put(schedule::update_schedule)
                .delete(schedule::delete_schedule),
        )
        .route(
            "/work-plans",
            get(work_plan::get_work_plans).post(work_plan::create_work_plan),
        )
        .route(
            "/work-plans/{id}",
            get(work_plan::get_work_plan_by_id)
                .put(work_plan::update_work_plan)
                .delete(work_plan::delete_work_plan),
        )
        .route("/work-plans/{id}/approve", post(work_plan::approve_work_plan))
        .route("/work-plans/{id}/start", post(work_plan::start_work_plan))
        .route(
            "/work-plans/{id}/complete",
            post(work_plan::complete_work_plan),
        )
        .route(
            "/equipment",
            get(equipment::get_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/{id}",
            get(equipment::get_equipment_by_id)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route(
            "/equipment/{id}/transfer",
            post(equipment::transfer_equipment),
        );

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
