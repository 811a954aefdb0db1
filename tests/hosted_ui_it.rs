// std
use std::collections::HashMap;
// self
use amplify_config::{
	ClientConfig,
	config::ResponseType,
	hosted_ui::{self, HostedUiEndpoints, PkceCodeChallengeMethod},
	loader,
};

const FIXTURE_JSON: &str = include_str!("fixtures/aws-exports.json");

fn load(response_type: ResponseType) -> ClientConfig {
	let mut config = loader::from_json_str(FIXTURE_JSON).expect("JSON fixture should load.");

	config.oauth.response_type = response_type;

	config
}

fn query(url: &url::Url) -> HashMap<String, String> {
	url.query_pairs().into_owned().collect()
}

#[test]
fn code_flow_carries_pkce() {
	let config = load(ResponseType::Code);
	let request = hosted_ui::start_sign_in(&config).expect("Sign-in request should build.");
	let params = query(&request.authorize_url);

	assert_eq!(request.authorize_url.host_str(), Some("idp.debsanddarren.com"));
	assert_eq!(request.authorize_url.path(), "/oauth2/authorize");
	assert_eq!(params["response_type"], "code");
	assert_eq!(params["client_id"], "2su34kutm86q0m7vcgfjks1at0");
	assert_eq!(params["redirect_uri"], "https://www.google.co.uk/");
	assert_eq!(params["scope"], "phone email openid profile aws.cognito.signin.user.admin");
	assert_eq!(params["state"], request.state);
	assert_eq!(params["code_challenge_method"], "S256");
	assert_eq!(Some(params["code_challenge"].as_str()), request.code_challenge());
	assert_eq!(request.code_challenge_method(), Some(PkceCodeChallengeMethod::S256));
	assert_eq!(request.code_verifier().map(str::len), Some(64));
	assert_eq!(request.state.len(), 32);
	assert!(request.validate_state(&params["state"]).is_ok());
}

#[test]
fn token_flow_omits_pkce() {
	let config = load(ResponseType::Token);
	let request = hosted_ui::start_sign_in(&config).expect("Sign-in request should build.");
	let params = query(&request.authorize_url);

	assert_eq!(params["response_type"], "token");
	assert!(!params.contains_key("code_challenge"));
	assert!(request.code_verifier().is_none());
}

#[test]
fn each_request_gets_fresh_state() {
	let config = load(ResponseType::Code);
	let first = hosted_ui::start_sign_in(&config).expect("Sign-in request should build.");
	let second = hosted_ui::start_sign_in(&config).expect("Sign-in request should build.");

	assert_ne!(first.state, second.state);
	assert!(first.validate_state(&second.state).is_err());
}

#[test]
fn sign_out_returns_to_configured_redirect() {
	let config = load(ResponseType::Code);
	let url = hosted_ui::sign_out_url(&config).expect("Sign-out URL should build.");
	let params = query(&url);

	assert_eq!(url.path(), "/logout");
	assert_eq!(params["client_id"], "2su34kutm86q0m7vcgfjks1at0");
	assert_eq!(params["logout_uri"], "https://www.google.co.uk/");
}

#[test]
fn endpoint_set_is_https_only() {
	let endpoints =
		HostedUiEndpoints::from_config(&load(ResponseType::Code)).expect("Endpoints should derive.");

	for url in [&endpoints.authorize, &endpoints.token, &endpoints.revoke, &endpoints.user_info] {
		assert_eq!(url.scheme(), "https");
	}

	assert_eq!(endpoints.user_info.path(), "/oauth2/userInfo");
}
