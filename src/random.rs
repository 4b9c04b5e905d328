//! Генератор случайных скаляров
//!
//! [`Random`] - явный дескриптор генератора вместо глобального состояния:
//! каждый вызывающий владеет своим потоком чисел, а в тестах поток
//! воспроизводится через [`Random::seeded`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;

use crate::matrix::Element;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("empty or non-finite range [{min}, {max}]")]
    EmptyRange { min: String, max: String },
    #[error("invalid normal distribution: {0}")]
    Normal(#[from] NormalError),
}

/// Обертка над [`StdRng`] с равномерными и нормальными выборками
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Генератор, инициализированный энтропией ОС
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Воспроизводимый генератор
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Целое из `[min, max]` включительно
    pub fn int(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        self.uniform(min, max)
    }

    /// Вещественное двойной точности из `[min, max]`
    pub fn double(&mut self, min: f64, max: f64) -> Result<f64, RandomError> {
        self.uniform(min, max)
    }

    /// Вещественное одинарной точности из `[min, max]`
    pub fn float(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        self.uniform(min, max)
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// `1` или `-1` с равной вероятностью
    pub fn sign(&mut self) -> i32 {
        if self.rng.gen::<bool>() {
            1
        } else {
            -1
        }
    }

    /// Выборка из нормального распределения `N(mean, stddev^2)`
    pub fn normal(&mut self, mean: f64, stddev: f64) -> Result<f64, RandomError> {
        let dist = Normal::new(mean, stddev)?;
        Ok(dist.sample(&mut self.rng))
    }

    fn uniform<T: Element>(&mut self, min: T, max: T) -> Result<T, RandomError> {
        if !T::valid_range(min, max) {
            return Err(RandomError::EmptyRange {
                min: format!("{:?}", min),
                max: format!("{:?}", max),
            });
        }
        Ok(T::sample(&mut self.rng, min, max))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
