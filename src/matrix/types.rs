//! Тип плотной матрицы и ошибки операций над ней

use std::ops::{Index, IndexMut};

use thiserror::Error;
use tracing::{debug, warn};

use super::element::Element;

/// Ошибки матричных операций
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("failed to allocate storage for a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },
    #[error("matrix shape {rows}x{cols} overflows usize")]
    CapacityOverflow { rows: usize, cols: usize },
    #[error("cannot multiply {}x{} by {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("empty or non-finite sampling range")]
    InvalidRange,
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Плотная матрица, хранящаяся построчно в одном буфере
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Выделяет матрицу `rows x cols`, заполненную нулями.
    ///
    /// Нулевые размеры допустимы. При нехватке памяти возвращается ошибка,
    /// частично построенная матрица наружу не попадает.
    pub fn alloc(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::CapacityOverflow { rows, cols })?;

        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            warn!(rows, cols, "matrix allocation failed");
            return Err(MatrixError::Allocation { rows, cols });
        }
        data.resize(len, T::zero());

        debug!(rows, cols, "matrix allocated");
        Ok(Self { rows, cols, data })
    }

    /// Собирает матрицу из вложенных строк одинаковой длины
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MatrixError::RaggedRows { row, expected, found });
        }

        let mut matrix = Self::alloc(rows.len(), expected)?;
        for (dst, src) in matrix.data.chunks_exact_mut(expected.max(1)).zip(&rows) {
            dst.copy_from_slice(src);
        }
        Ok(matrix)
    }
}

impl<T> Matrix<T> {
    /// Освобождает память и переводит матрицу в пустое состояние `0x0`.
    ///
    /// Повторный вызов ничего не делает.
    pub fn release(&mut self) {
        if self.rows == 0 && self.cols == 0 && self.data.capacity() == 0 {
            return;
        }
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// `true`, если матрица владеет хотя бы одной ячейкой
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Размеры в виде `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Строка `row` как срез длины `cols`
    ///
    /// # Panics
    ///
    /// Если `row >= rows`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {} out of range for {} rows", row, self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Все ячейки в построчном порядке
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
