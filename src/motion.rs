use std::time::Duration;

/// Where a revealed element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Grows from 75% scale instead of sliding.
    Scale,
}

impl RevealFrom {
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Below => "opacity-0 translate-y-8",
            Self::Left => "opacity-0 -translate-x-8",
            Self::Right => "opacity-0 translate-x-8",
            Self::Scale => "opacity-0 scale-75",
        }
    }

    pub fn shown_class(self) -> &'static str {
        match self {
            Self::Below | Self::Left | Self::Right => "opacity-100 translate-x-0 translate-y-0",
            Self::Scale => "opacity-100 scale-100",
        }
    }

    pub fn class(self, revealed: bool) -> String {
        let state = if revealed {
            self.shown_class()
        } else {
            self.hidden_class()
        };
        format!("transition-all duration-[600ms] ease-out {state}")
    }
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger(base: Duration, step: Duration, index: usize) -> Duration {
    base + step * index as u32
}

pub fn delay_style(delay: Duration) -> String {
    format!("transition-delay: {}ms", delay.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_is_linear() {
        let base = Duration::from_millis(200);
        let step = Duration::from_millis(100);
        assert_eq!(stagger(base, step, 0), base);
        assert_eq!(stagger(base, step, 3), Duration::from_millis(500));
        assert_eq!(
            stagger(Duration::ZERO, Duration::from_millis(150), 4),
            Duration::from_millis(600)
        );
    }

    #[test]
    fn test_delay_style() {
        assert_eq!(
            delay_style(Duration::from_millis(300)),
            "transition-delay: 300ms"
        );
    }

    #[test]
    fn test_reveal_classes() {
        assert!(RevealFrom::Left.class(false).contains("-translate-x-8"));
        assert!(RevealFrom::Left.class(true).contains("opacity-100"));
        assert!(RevealFrom::Scale.class(false).contains("scale-75"));
        assert_ne!(RevealFrom::Below.class(false), RevealFrom::Below.class(true));
    }
}
