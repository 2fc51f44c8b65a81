use std::rc::Rc;

use log::debug;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

/// Who the navbar shows as signed in. Nothing here is verified: the
/// login and register forms only validate their input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub email: Option<String>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.email.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SignedIn(String),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(email) => Rc::new(Self { email: Some(email) }),
            AuthAction::SignedOut => Rc::new(Self { email: None }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub sign_in: Callback<String>,
    pub sign_out: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(AuthState::default);

    let sign_in = {
        let auth = auth.clone();
        Callback::from(move |email: String| {
            debug!("Signed in as {}", email);
            auth.dispatch(AuthAction::SignedIn(email));
        })
    };

    let sign_out = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::SignedOut))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sign_in_and_out() {
        let state = Rc::new(AuthState::default());
        assert!(!state.is_signed_in());

        let state = state.reduce(AuthAction::SignedIn("fan@example.com".to_string()));
        assert_eq!(state.email.as_deref(), Some("fan@example.com"));

        let state = state.reduce(AuthAction::SignedOut);
        assert_eq!(*state, AuthState::default());
    }
}
