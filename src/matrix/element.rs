//! Числовые типы элементов матрицы

use std::fmt;

use rand::Rng;

/// Ширина поля ячейки в табличном выводе
pub const CELL_WIDTH: usize = 10;

/// Числовой тип, который может храниться в [`Matrix`](super::Matrix)
///
/// Реализован для `i32`, `i64`, `f64` и `f32`. Для целых типов арифметика
/// произведения выполняется с переносом, для вещественных - обычная IEEE.
pub trait Element: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Нейтральный элемент сложения
    fn zero() -> Self;

    /// Возвращает `self + a * b` в арифметике типа
    fn accumulate_product(self, a: Self, b: Self) -> Self;

    /// Проверяет, что из диапазона `[min, max]` можно делать выборку
    fn valid_range(min: Self, max: Self) -> bool;

    /// Равномерная выборка из `[min, max]` включительно.
    ///
    /// Диапазон должен быть заранее проверен через [`Element::valid_range`].
    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;

    /// Текстовое представление по умолчанию
    fn write_plain<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    /// Представление, выровненное вправо по ширине [`CELL_WIDTH`]
    fn write_padded<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

macro_rules! impl_element {
    (int: $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn accumulate_product(self, a: Self, b: Self) -> Self {
                    self.wrapping_add(a.wrapping_mul(b))
                }

                fn valid_range(min: Self, max: Self) -> bool {
                    min <= max
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..=max)
                }

                fn write_plain<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{}", self)
                }

                fn write_padded<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{:>width$}", self, width = CELL_WIDTH)
                }
            }
        )*
    };
    (float: $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn accumulate_product(self, a: Self, b: Self) -> Self {
                    self + a * b
                }

                // rand делит размах на (1 - EPSILON), результат тоже должен быть конечным
                fn valid_range(min: Self, max: Self) -> bool {
                    min <= max && ((max - min) / (1.0 - <$t>::EPSILON)).is_finite()
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..=max)
                }

                fn write_plain<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{:.6}", self)
                }

                fn write_padded<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{:>width$.6}", self, width = CELL_WIDTH)
                }
            }
        )*
    };
}

impl_element!(int: i32, i64);
impl_element!(float: f64, f32);
