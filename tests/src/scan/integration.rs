#![cfg(test)]
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use randrev_common::config::{Config, Protocol};
use randrev_common::error::LoadError;
use randrev_common::network::resolver::{self, ResolverPool};
use randrev_core::scanner::{self, TargetSource};

use super::mock::MockConnector;

fn pool(lines: &str) -> Arc<ResolverPool> {
    Arc::new(resolver::from_reader(Cursor::new(lines), Path::new("resolvers.txt")).unwrap())
}

fn source(targets: &[String]) -> TargetSource {
    let mut input = targets.join("\n");
    if !input.is_empty() {
        input.push('\n');
    }
    TargetSource::from_reader(Cursor::new(input.into_bytes()), Path::new("targets.txt"))
}

fn config(threads: usize) -> Config {
    Config {
        threads,
        ..Config::default()
    }
}

fn targets(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("10.0.{}.{}", i / 256, i % 256))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_target_is_processed_exactly_once() {
    let mock = Arc::new(MockConnector::default());
    let input = targets(500);

    let report = scanner::perform_scan(
        &config(8),
        pool("8.8.8.8\n1.1.1.1\n9.9.9.9\n"),
        source(&input),
        mock.clone(),
    )
    .await;

    assert_eq!(report.queued, 500);
    assert_eq!(report.per_worker.len(), 8);
    assert_eq!(report.processed(), 500);
    assert_eq!(report.failed, 0);

    let mut seen: HashMap<IpAddr, usize> = HashMap::new();
    for call in mock.calls() {
        *seen.entry(call.addr).or_default() += 1;
    }
    assert_eq!(seen.len(), 500);
    assert!(seen.values().all(|&n| n == 1), "a target was looked up twice");
}

#[tokio::test]
async fn empty_target_list_terminates_cleanly() {
    let mock = Arc::new(MockConnector::default());

    let report = scanner::perform_scan(&config(4), pool("8.8.8.8\n"), source(&[]), mock.clone()).await;

    assert_eq!(report.queued, 0);
    assert_eq!(report.per_worker, vec![0, 0, 0, 0]);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn more_workers_than_targets() {
    let mock = Arc::new(MockConnector::default());

    let report = scanner::perform_scan(&config(16), pool("8.8.8.8\n"), source(&targets(3)), mock.clone()).await;

    assert_eq!(report.per_worker.len(), 16);
    assert_eq!(report.processed(), 3);
    assert_eq!(mock.calls().len(), 3);
}

#[tokio::test]
async fn single_resolver_single_target() {
    let mock = Arc::new(MockConnector::default());

    let report = scanner::perform_scan(
        &config(1),
        pool("8.8.8.8\n"),
        source(&["1.2.3.4".to_string()]),
        mock.clone(),
    )
    .await;

    assert_eq!(report.processed(), 1);
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].addr, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(
        calls[0].binding.server,
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53)
    );
    assert_eq!(calls[0].binding.protocol, Protocol::Udp);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn hung_lookup_does_not_block_the_others() {
    // The first queued target never gets an answer.
    let stuck = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0));
    let mock = Arc::new(MockConnector::hanging_on(&[stuck]));
    let timeout = Duration::from_secs(3);
    let cfg = Config {
        threads: 2,
        timeout,
        ..Config::default()
    };

    let scan = {
        let mock = mock.clone();
        tokio::spawn(async move {
            scanner::perform_scan(&cfg, pool("8.8.8.8\n"), source(&targets(20)), mock).await
        })
    };

    // The other worker has to get through the remaining 19 targets while the
    // stuck lookup is still waiting for its timeout.
    let started = Instant::now();
    while mock.calls().len() < 20 {
        assert!(
            started.elapsed() < Duration::from_secs(1),
            "only {} lookups issued while one was hung",
            mock.calls().len()
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let report = scan.await.unwrap();
    assert_eq!(report.processed(), 20);
    assert_eq!(report.failed, 1);
    assert!(report.elapsed >= timeout);
    assert!(report.elapsed < timeout * 2);
}

#[tokio::test]
async fn failed_lookups_do_not_stop_the_scan() {
    let failing: Vec<IpAddr> = targets(10)
        .iter()
        .step_by(2)
        .map(|t| t.parse().unwrap())
        .collect();
    let mock = Arc::new(MockConnector::failing_on(&failing));

    let mut input = targets(10);
    input.push("garbage".to_string());

    let report = scanner::perform_scan(&config(3), pool("8.8.8.8\n"), source(&input), mock.clone()).await;

    assert_eq!(report.queued, 11);
    assert_eq!(report.processed(), 11);
    assert_eq!(report.failed, 6);
    // The unparsable target fails before reaching the connector.
    assert_eq!(mock.calls().len(), 10);
}

#[tokio::test]
async fn tcp_and_custom_port_reach_the_connector() {
    let mock = Arc::new(MockConnector::default());
    let cfg = Config {
        threads: 2,
        protocol: Protocol::Tcp,
        port: 5353,
        ..Config::default()
    };

    scanner::perform_scan(&cfg, pool("1.1.1.1\n"), source(&targets(4)), mock.clone()).await;

    for call in mock.calls() {
        assert_eq!(call.binding.protocol, Protocol::Tcp);
        assert_eq!(call.binding.server.port(), 5353);
    }
}

#[tokio::test]
async fn strict_targets_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1.2.3.4").unwrap();
    writeln!(file, "5.6.7.8").unwrap();
    let mock = Arc::new(MockConnector::default());

    let source = TargetSource::strict(file.path()).unwrap();
    let report = scanner::perform_scan(&config(2), pool("8.8.8.8\n"), source, mock.clone()).await;

    assert_eq!(report.processed(), 2);
}

#[test]
fn two_dot_resolver_is_rejected_before_scanning() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "8.8.8.8").unwrap();
    writeln!(file, "not.an.ip").unwrap();

    assert!(matches!(
        resolver::load(file.path()),
        Err(LoadError::InvalidResolver { line_no: 2, .. })
    ));
}

#[tokio::test]
async fn missing_target_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = TargetSource::open(&dir.path().join("targets.txt")).await;
    assert!(matches!(result, Err(LoadError::Open { .. })));
}
