use crate::{Coordinates, Error, MapState, RegistrationForm, RegistrationState, Session};
use std::mem;

/// Screens of the client and the legal moves between them:
///
/// ```text
/// Welcome -> SignIn | SignUp
/// SignUp  -> SignIn | Welcome (back)
/// SignIn  -> Map (signed in) | SignUp | Welcome (back)
/// Map     -> Registration
/// Registration -> Map (back)
/// any     -> SignIn (sign out / session expired)
/// ```
#[derive(Debug, Default)]
pub enum Screen {
    #[default]
    Welcome,
    SignIn,
    SignUp,
    Map(MapState),
    Registration {
        map: MapState,
        state: RegistrationState,
    },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::SignIn => "sign-in",
            Screen::SignUp => "sign-up",
            Screen::Map(_) => "map",
            Screen::Registration { .. } => "registration",
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Screen::Map(map) => Some(map.session()),
            Screen::Registration { state, .. } => Some(&state.session),
            _ => None,
        }
    }

    pub fn map(&self) -> Option<&MapState> {
        match self {
            Screen::Map(map) => Some(map),
            Screen::Registration { map, .. } => Some(map),
            _ => None,
        }
    }

    pub fn map_mut(&mut self) -> Option<&mut MapState> {
        match self {
            Screen::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn registration(&self) -> Option<&RegistrationState> {
        match self {
            Screen::Registration { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn registration_mut(&mut self) -> Option<&mut RegistrationState> {
        match self {
            Screen::Registration { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn go_to_sign_in(&mut self) -> Result<(), Error> {
        match self {
            Screen::Welcome | Screen::SignUp => {
                *self = Screen::SignIn;
                Ok(())
            }
            _ => Err(self.illegal("sign-in")),
        }
    }

    pub fn go_to_sign_up(&mut self) -> Result<(), Error> {
        match self {
            Screen::Welcome | Screen::SignIn => {
                *self = Screen::SignUp;
                Ok(())
            }
            _ => Err(self.illegal("sign-up")),
        }
    }

    pub fn signed_in(&mut self, session: Session, center: Coordinates) -> Result<(), Error> {
        match self {
            Screen::SignIn => {
                *self = Screen::Map(MapState::new(session, center));
                Ok(())
            }
            _ => Err(self.illegal("map")),
        }
    }

    pub fn open_registration(&mut self, form: RegistrationForm) -> Result<(), Error> {
        match mem::take(self) {
            Screen::Map(map) => {
                let state = RegistrationState::new(map.session().clone(), form);
                *self = Screen::Registration { map, state };
                Ok(())
            }
            other => {
                *self = other;
                Err(self.illegal("registration"))
            }
        }
    }

    pub fn back(&mut self) -> Result<(), Error> {
        match mem::take(self) {
            Screen::Registration { map, .. } => {
                *self = Screen::Map(map);
                Ok(())
            }
            Screen::SignIn | Screen::SignUp => {
                *self = Screen::Welcome;
                Ok(())
            }
            other => {
                *self = other;
                Err(self.illegal("back"))
            }
        }
    }

    /// Drops any session and returns to sign-in. Legal from every screen.
    pub fn sign_out(&mut self) {
        if self.session().is_some() {
            log::info!("session closed on {} screen", self.name());
        }
        *self = Screen::SignIn;
    }

    fn illegal(&self, target: &str) -> Error {
        Error::Validation(format!(
            "Cannot go from the {} screen to {}.",
            self.name(),
            target
        ))
    }
}
