mod material;

pub use material::MaterialEvaluator;
