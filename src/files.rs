//! Чтение и запись файлов целиком

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Создает или перезаписывает файл содержимым `data`
pub fn write<P: AsRef<Path>>(path: P, data: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = fs::File::create(path)
        .with_context(|| format!("Не удалось открыть {} для записи", path.display()))?;
    file.write_all(data.as_bytes())
        .with_context(|| format!("Не удалось записать в {}", path.display()))
}

/// Дописывает `data` в конец файла, создавая его при необходимости
pub fn append<P: AsRef<Path>>(path: P, data: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Не удалось открыть {} для дозаписи", path.display()))?;
    file.write_all(data.as_bytes())
        .with_context(|| format!("Не удалось дописать в {}", path.display()))
}

/// Читает весь файл как текст UTF-8
pub fn read<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Не удалось прочитать {}", path.display()))
}
