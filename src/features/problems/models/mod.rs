mod problem;

pub use problem::{CreateProblem, Problem, ProblemCategory, ProblemImage, ProblemStatus};
