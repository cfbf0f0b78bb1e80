use axum::Json;
use axum::extract::Path;
use chrono::Utc;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use super::types::{Health, HealthQuery};
use crate::api::extract::ApiQuery;

pub async fn handle_health(ApiQuery(query): ApiQuery<HealthQuery>) -> Json<Health> {
    Json(make_report(query.echo, None))
}

pub async fn handle_health_path(
    Path(path_echo): Path<String>,
    ApiQuery(query): ApiQuery<HealthQuery>,
) -> Json<Health> {
    Json(make_report(query.echo, Some(path_echo)))
}

fn make_report(echo: Option<String>, path_echo: Option<String>) -> Health {
    Health {
        status: 200,
        status_message: "OK".to_string(),
        timestamp: Utc::now(),
        ip_address: resolve_host_ip().to_string(),
        echo,
        path_echo,
    }
}

/// Local address discovery via a connected UDP socket; no datagrams are
/// sent. Hosts without a usable route report loopback.
fn resolve_host_ip() -> IpAddr {
    fn probe() -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip())
    }

    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
