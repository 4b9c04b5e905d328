//! Модуль для работы с матрицами
//! 
//! Предоставляет:
//! - Обобщенную плотную матрицу [`Matrix`]
//! - Числовые типы элементов ([`Element`])
//! - Умножение, случайное заполнение и текстовый вывод

mod types;
mod element;
mod format;
mod operations;

pub use types::{Matrix, MatrixError};
pub use element::{Element, CELL_WIDTH};

/// Матрица целых чисел
pub type MatrixI = Matrix<i32>;
/// Матрица чисел двойной точности
pub type MatrixD = Matrix<f64>;
/// Матрица чисел одинарной точности
pub type MatrixF = Matrix<f32>;
