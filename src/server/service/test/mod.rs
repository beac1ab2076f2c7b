mod department;
mod notification;
mod schedule;
mod work_plan;
mod workflow;
