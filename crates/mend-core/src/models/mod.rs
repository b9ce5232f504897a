pub mod assessment;
pub mod pain_scale;
pub mod record;
pub mod report;
