//! Небольшие утилиты: плотные матрицы, случайные числа, работа с файлами

pub mod files;
pub mod matrix;
pub mod random;

// Реэкспорт основных типов для удобства
pub use matrix::{Element, Matrix, MatrixD, MatrixError, MatrixF, MatrixI};
pub use random::{Random, RandomError};
