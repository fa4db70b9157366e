//! Interaction-state opacities

/// Interaction state an opacity applies to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    /// Share of the component background kept when disabled
    Disabled,
    /// Blend toward the contrast color on hover
    Hover,
    /// Blend toward the contrast color while pressed
    Pressed,
}

impl OpacityToken {
    pub const ALL: [OpacityToken; 3] = [Self::Disabled, Self::Hover, Self::Pressed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Hover => "hover",
            Self::Pressed => "pressed",
        }
    }
}

/// Opacity per interaction state, each in `0.0..=1.0`
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub hover: f32,
    pub pressed: f32,
}

impl OpacityTokens {
    pub fn get(&self, token: OpacityToken) -> f32 {
        let value = match token {
            OpacityToken::Disabled => self.disabled,
            OpacityToken::Hover => self.hover,
            OpacityToken::Pressed => self.pressed,
        };
        value.clamp(0.0, 1.0)
    }

    /// `(token, opacity)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (OpacityToken, f32)> + '_ {
        OpacityToken::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.6,
            hover: 0.1,
            pressed: 0.2,
        }
    }
}
