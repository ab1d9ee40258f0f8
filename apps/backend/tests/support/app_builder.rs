use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use bingo_backend::config::channel::ChannelConfig;
use bingo_backend::middleware::{ChannelGuard, RequestTrace, StructuredLogger};
use bingo_backend::routes;
use bingo_backend::state::app_state::AppState;

/// Builder for test Actix service instances.
///
/// Without a channel restriction the routes are registered exactly as
/// `routes::configure` does; with one, `/api/games` is wrapped by
/// `ChannelGuard` the way `main.rs` mounts it.
pub struct TestAppBuilder {
    state: AppState,
    channel: Option<ChannelConfig>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            channel: None,
        }
    }

    pub fn with_channel(mut self, channel: ChannelConfig) -> Self {
        self.channel = Some(channel);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let channel = self.channel;

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| match channel {
                    Some(channel) => {
                        cfg.service(
                            web::scope("/health").configure(routes::health::configure_routes),
                        );
                        cfg.service(
                            web::scope("/api/games")
                                .wrap(ChannelGuard::new(channel))
                                .configure(routes::games::configure_routes),
                        );
                    }
                    None => routes::configure(cfg),
                }),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
