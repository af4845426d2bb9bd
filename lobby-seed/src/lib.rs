// Library exports for lobby-seed
// This allows the integration tests to drive the seeder directly

pub mod seeder;
