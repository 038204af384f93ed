//! Account forms: artist registration and login.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::guard::{Route, LOGIN_ROUTE};
use crate::models::{ArtistType, Credentials, NewArtist, User};

pub const MSG_REGISTERED: &str = "Inscription réussie ! Vous pouvez maintenant vous connecter.";
pub const MSG_REGISTER_FAILED: &str = "Erreur lors de l'inscription";
pub const MSG_LOGIN_FAILED: &str = "Email ou mot de passe incorrect";

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub nom: String,
    pub prenom: String,
    pub nom_artiste: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub telephone: String,
    pub adresse: String,
    pub type_artiste: Option<ArtistType>,
}

impl RegistrationForm {
    /// Local checks, then the request body. A password mismatch is reported
    /// before anything else.
    pub fn validate(&self) -> FormResult<NewArtist> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        let mut missing = Vec::new();
        for (name, value) in [
            ("nom", &self.nom),
            ("prenom", &self.prenom),
            ("nom_artiste", &self.nom_artiste),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        let type_artiste = match self.type_artiste {
            Some(t) if missing.is_empty() => t,
            Some(_) => return Err(FormError::MissingRequired(missing)),
            None => {
                missing.push("type_artiste");
                return Err(FormError::MissingRequired(missing));
            }
        };

        Ok(NewArtist {
            nom: self.nom.trim().to_string(),
            prenom: self.prenom.trim().to_string(),
            nom_artiste: self.nom_artiste.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            telephone: self.telephone.trim().to_string(),
            adresse: self.adresse.trim().to_string(),
            type_artiste,
        })
    }

    /// Where to go after a successful registration.
    pub fn next_route() -> &'static str {
        LOGIN_ROUTE
    }
}

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> FormResult<Credentials> {
        let mut missing = Vec::new();
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingRequired(missing));
        }
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Landing page after login: the curation dashboard for admins, home otherwise.
pub fn landing_route(user: &User) -> Route {
    if user.is_admin {
        Route::Admin
    } else {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            nom: "Durand".into(),
            prenom: "Alice".into(),
            nom_artiste: "Ali D".into(),
            email: " alice@example.com ".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            telephone: String::new(),
            adresse: String::new(),
            type_artiste: Some(ArtistType::Painter),
        }
    }

    #[test]
    fn test_password_mismatch_comes_first() {
        let form = RegistrationForm {
            confirm_password: "other".into(),
            nom: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::PasswordMismatch);
        assert_eq!(err.to_string(), "Les mots de passe ne correspondent pas");
    }

    #[test]
    fn test_valid_registration_includes_password() {
        let artist = filled().validate().unwrap();
        assert_eq!(artist.email, "alice@example.com");
        assert_eq!(artist.password, "secret");

        let body = serde_json::to_value(&artist).unwrap();
        assert_eq!(body["type_artiste"], "Peintre");
        assert_eq!(body["password"], "secret");
    }

    #[test]
    fn test_missing_type() {
        let form = RegistrationForm {
            type_artiste: None,
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(FormError::MissingRequired(vec!["type_artiste"]))
        );
    }

    #[test]
    fn test_login_form_and_landing() {
        let form = LoginForm {
            email: "admin@artcartel.com".into(),
            password: String::new(),
        };
        assert_eq!(
            form.credentials().unwrap_err(),
            FormError::MissingRequired(vec!["password"])
        );

        let user = User {
            id: 1,
            username: "admin".into(),
            email: "admin@artcartel.com".into(),
            is_admin: true,
        };
        assert_eq!(landing_route(&user), Route::Admin);
        assert_eq!(landing_route(&User { is_admin: false, ..user }), Route::Home);
        assert_eq!(RegistrationForm::next_route(), "/connexion");
    }
}
