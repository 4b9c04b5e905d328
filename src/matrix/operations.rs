//! Операции над матрицами

use rand::Rng;
use tracing::{debug, warn};

use super::element::Element;
use super::types::{Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Классическое умножение `self * rhs` тройным циклом.
    ///
    /// Требует `self.cols() == rhs.rows()`, иначе возвращает
    /// [`MatrixError::DimensionMismatch`] без выделения памяти.
    /// Сумма копится в типе `T`, целые переполняются с переносом.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != rhs.rows {
            warn!(
                left_rows = self.rows,
                left_cols = self.cols,
                right_rows = rhs.rows,
                right_cols = rhs.cols,
                "incompatible shapes for multiplication"
            );
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let (m, k, n) = (self.rows, self.cols, rhs.cols);
        debug!(m, k, n, "multiplying matrices");

        let mut out = Matrix::alloc(m, n)?;
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                for p in 0..k {
                    sum = sum.accumulate_product(self.data[i * k + p], rhs.data[p * n + j]);
                }
                out.data[i * n + j] = sum;
            }
        }
        Ok(out)
    }

    /// Заполняет каждую ячейку равномерной выборкой из `[min, max]`.
    ///
    /// Ячейки обходятся построчно, по одной выборке на ячейку. При пустом или
    /// бесконечном диапазоне матрица не меняется.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: T,
        max: T,
    ) -> Result<(), MatrixError> {
        if !T::valid_range(min, max) {
            return Err(MatrixError::InvalidRange);
        }
        for cell in self.data.iter_mut() {
            *cell = T::sample(rng, min, max);
        }
        Ok(())
    }

    /// Записывает `value` во все ячейки
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}
