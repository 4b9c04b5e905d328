//! Текстовый вывод матриц

use std::fmt;
use std::io;

use super::element::Element;
use super::types::Matrix;

impl<T: Element> Matrix<T> {
    /// Простой вывод: значение и пробел на ячейку, перевод строки на строку
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        self.plain_into(&mut out)
            .expect("запись в String не завершается ошибкой");
        out
    }

    /// Табличный вывод: `"| "`, значение шириной 10 и пробел на ячейку,
    /// строка закрывается `"|"`
    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out)
            .expect("запись в String не завершается ошибкой");
        out
    }

    pub fn write_plain<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_plain().as_bytes())
    }

    pub fn write_pretty<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_pretty().as_bytes())
    }

    /// Печатает [`Matrix::render_plain`] в stdout
    pub fn print(&self) {
        print!("{}", self.render_plain());
    }

    /// Печатает [`Matrix::render_pretty`] в stdout
    pub fn pprint(&self) {
        print!("{}", self.render_pretty());
    }

    fn plain_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for r in 0..self.rows {
            for value in self.row(r) {
                value.write_plain(out)?;
                out.write_char(' ')?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn pretty_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for r in 0..self.rows {
            for value in self.row(r) {
                out.write_str("| ")?;
                value.write_padded(out)?;
                out.write_char(' ')?;
            }
            out.write_str("|\n")?;
        }
        Ok(())
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.plain_into(f)
    }
}
