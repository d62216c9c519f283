use crate::app_context::AppContext;
use crate::errors::GameError;
use crate::scoring::verdict;
use crate::storage::interface::IPlayerStorage;
use crate::tasks::models::Task;
use crate::tasks::requests::CheckTaskRequestBody;
use crate::tasks::responses::{CheckTaskResponse, TaskResponse};

pub struct TasksHttpHandler<PS: IPlayerStorage> {
    app_context: AppContext<PS>,
}

impl<PS> TasksHttpHandler<PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    pub fn random_task(&self) -> TaskResponse {
        TaskResponse::from(self.app_context.catalog.random_task())
    }

    pub fn locations(&self) -> Vec<Task> {
        self.app_context.catalog.all().to_vec()
    }

    pub fn check_task(
        &self,
        request_body: CheckTaskRequestBody,
    ) -> Result<CheckTaskResponse, GameError> {
        request_body.validate()?;
        let task = self.app_context.catalog.find_task(&request_body.task_name)?;
        let verdict = verdict::evaluate(request_body.latitude, request_body.longitude, task);
        tracing::info!(
            task = "guess_checked",
            task_name = %task.name,
            success = verdict.success,
            distance_km = verdict.distance_km,
            bonus_points = verdict.bonus_points,
        );
        Ok(CheckTaskResponse::from(verdict))
    }
}
