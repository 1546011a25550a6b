use crate::domain::{
    common::services::Service,
    health::{
        entities::{HEALTH_MESSAGE, HealthStatus},
        ports::HealthCheckService,
    },
    recipe::ports::TextGenerator,
    vision::ports::{ImageCaptioner, ObjectDetector},
};

impl<CAP, DET, GEN> HealthCheckService for Service<CAP, DET, GEN>
where
    CAP: ImageCaptioner,
    DET: ObjectDetector,
    GEN: TextGenerator,
{
    fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            message: HEALTH_MESSAGE.to_string(),
            text_generation: self.text_generator.is_some(),
        }
    }
}
