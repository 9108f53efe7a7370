//! Indentation units.

/// One level of indentation in emitted C#.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, as in the handler's class bodies.
    pub const CSHARP: Self = Self::Spaces(4);

    /// Append `levels` units of this indent to `buf`.
    pub fn write(&self, buf: &mut String, levels: usize) {
        for _ in 0..levels {
            match self {
                Self::Spaces(width) => {
                    buf.extend(std::iter::repeat_n(' ', usize::from(*width)))
                }
                Self::Tab => buf.push('\t'),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_levels() {
        let mut buf = String::new();
        Indent::CSHARP.write(&mut buf, 2);
        assert_eq!(buf, " ".repeat(8));

        let mut buf = String::new();
        Indent::Tab.write(&mut buf, 1);
        Indent::Spaces(2).write(&mut buf, 1);
        assert_eq!(buf, "\t  ");
    }

    #[test]
    fn test_zero_levels_writes_nothing() {
        let mut buf = String::new();
        Indent::Tab.write(&mut buf, 0);
        assert!(buf.is_empty());
    }
}
