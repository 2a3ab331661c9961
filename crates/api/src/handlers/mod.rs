pub mod annotations;
pub mod clip;
pub mod labels;
