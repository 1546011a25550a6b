use std::sync::Arc;

use crate::domain::{
    recipe::ports::TextGenerator,
    vision::ports::{ImageCaptioner, ObjectDetector},
};

pub struct Service<CAP, DET, GEN>
where
    CAP: ImageCaptioner,
    DET: ObjectDetector,
    GEN: TextGenerator,
{
    pub(crate) captioner: Arc<CAP>,
    pub(crate) detector: Arc<DET>,
    pub(crate) text_generator: Option<Arc<GEN>>,
    pub(crate) template_seed: Option<u64>,
}

impl<CAP, DET, GEN> Service<CAP, DET, GEN>
where
    CAP: ImageCaptioner,
    DET: ObjectDetector,
    GEN: TextGenerator,
{
    pub fn new(
        captioner: CAP,
        detector: DET,
        text_generator: Option<GEN>,
        template_seed: Option<u64>,
    ) -> Self {
        Self {
            captioner: Arc::new(captioner),
            detector: Arc::new(detector),
            text_generator: text_generator.map(Arc::new),
            template_seed,
        }
    }
}

impl<CAP, DET, GEN> Clone for Service<CAP, DET, GEN>
where
    CAP: ImageCaptioner,
    DET: ObjectDetector,
    GEN: TextGenerator,
{
    fn clone(&self) -> Self {
        Self {
            captioner: Arc::clone(&self.captioner),
            detector: Arc::clone(&self.detector),
            text_generator: self.text_generator.clone(),
            template_seed: self.template_seed,
        }
    }
}
