mod equipment;
mod schedule;
mod work_plan;
