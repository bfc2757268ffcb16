/// Focusable elements of the login form, in Tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthFocus {
    #[default]
    Login,
    Password,
    LoginButton,
    RegisterButton,
}

impl AuthFocus {
    const ORDER: [AuthFocus; 4] = [
        AuthFocus::Login,
        AuthFocus::Password,
        AuthFocus::LoginButton,
        AuthFocus::RegisterButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Default)]
pub struct AuthState {
    pub focus: AuthFocus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(AuthFocus::Login.next(), AuthFocus::Password);
        assert_eq!(AuthFocus::RegisterButton.next(), AuthFocus::Login);
        assert_eq!(AuthFocus::Login.prev(), AuthFocus::RegisterButton);
    }
}
