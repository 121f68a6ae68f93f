use crate::error::AgendoError;
use actix_web::HttpRequest;
use agendo_domain::{User, ID};
use agendo_infra::Context;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in the access tokens minted by the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// The `User` this token authenticates
    pub user_id: ID,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

fn decode_token(secret: &str, token: &str) -> Result<Claims, AgendoError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AgendoError::Unauthorized("Invalid access token provided".into()))?;

    Ok(token_data.claims)
}

/// Authenticates the request from the `Authorization: Bearer` header and
/// resolves the account it belongs to.
pub async fn protect_route(req: &HttpRequest, ctx: &Context) -> Result<User, AgendoError> {
    let token = match req.headers().get("Authorization") {
        Some(token) => token.to_str().map_err(|_| {
            AgendoError::Unauthorized("Invalid authorization header provided".into())
        })?,
        None => {
            return Err(AgendoError::Unauthorized(
                "Missing authorization header".into(),
            ))
        }
    };
    let token = parse_authtoken_header(token);
    let claims = decode_token(&ctx.config.access_token_secret, &token)?;

    ctx.repos.users.find(&claims.user_id).await.ok_or_else(|| {
        AgendoError::Unauthorized("The account this token was issued for no longer exists".into())
    })
}

/// Like `protect_route` but additionally requires the provider role.
pub async fn protect_provider_route(req: &HttpRequest, ctx: &Context) -> Result<User, AgendoError> {
    let user = protect_route(req, ctx).await?;
    if !user.is_provider() {
        return Err(AgendoError::Forbidden(
            "Only provider accounts can access this route".into(),
        ));
    }
    Ok(user)
}

/// Like `protect_route` but additionally requires the client role.
pub async fn protect_client_route(req: &HttpRequest, ctx: &Context) -> Result<User, AgendoError> {
    let user = protect_route(req, ctx).await?;
    if user.is_provider() {
        return Err(AgendoError::Forbidden(
            "Only client accounts can access this route".into(),
        ));
    }
    Ok(user)
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use agendo_domain::Role;
    use agendo_infra::setup_context_inmemory;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_for(user_id: ID, secret: &str) -> String {
        let iat = 1_700_000_000;
        let claims = Claims {
            exp: iat + 3600 * 24 * 365 * 10,
            iat,
            user_id,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_missing_and_malformed_tokens() {
        let ctx = setup_context_inmemory();

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn it_resolves_the_token_owner() {
        let ctx = setup_context_inmemory();
        let user = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&user).await.unwrap();

        let token = token_for(user.id.clone(), &ctx.config.access_token_secret);
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let found = protect_route(&req, &ctx).await.unwrap();
        assert_eq!(found.id, user.id);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_clients_on_provider_routes() {
        let ctx = setup_context_inmemory();
        let user = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&user).await.unwrap();

        let token = token_for(user.id.clone(), &ctx.config.access_token_secret);
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        assert!(protect_provider_route(&req, &ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_tokens_signed_with_another_secret() {
        let ctx = setup_context_inmemory();
        let user = User::new("Ana", "ana@example.com", Role::Provider);
        ctx.repos.users.insert(&user).await.unwrap();

        let token = token_for(user.id.clone(), "some-other-secret");
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        assert!(protect_route(&req, &ctx).await.is_err());
    }
}
