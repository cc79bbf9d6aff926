use digit_net::*;
use serde_json::Value;

fn trained_network() -> Network {
    let mut net = Network::with_seed(NetworkConfig::new(6, 5, 3, 0.25), 3);
    let input = [0.01, 0.5, 1.0, 0.2, 0.8, 0.3];
    for _ in 0..20 {
        net.train(&input, &[0.01, 0.01, 0.99]);
    }
    net
}

#[test]
fn save_then_load_reproduces_weights_and_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.net");
    let original = trained_network();
    original.save(&path).unwrap();

    let mut restored = Network::with_seed(*original.config(), 99);
    restored.load(&path).unwrap();

    assert_eq!(restored.config(), original.config());
    for (a, b) in restored.w_input_hidden().values().zip(original.w_input_hidden().values()) {
        assert!((a - b).abs() <= 1e-12);
    }
    for (a, b) in restored.w_hidden_output().values().zip(original.w_hidden_output().values()) {
        assert!((a - b).abs() <= 1e-12);
    }

    let probe = [0.3, 0.1, 0.9, 0.01, 0.5, 0.7];
    for (a, b) in restored.query(&probe).iter().zip(original.query(&probe)) {
        assert!((a - b).abs() <= 1e-12);
    }

    assert_eq!(Network::from_file(&path).unwrap(), restored);
}

#[test]
fn save_is_idempotent_and_leaves_the_network_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let net = trained_network();
    let before = net.clone();

    net.save(dir.path().join("a.net")).unwrap();
    net.save(dir.path().join("b.net")).unwrap();

    assert_eq!(net, before);
    let a = std::fs::read(dir.path().join("a.net")).unwrap();
    let b = std::fs::read(dir.path().join("b.net")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn save_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.net");
    std::fs::write(&path, vec![b'x'; 1 << 16]).unwrap();

    let net = trained_network();
    net.save(&path).unwrap();
    assert_eq!(Network::from_file(&path).unwrap(), net);
}

#[test]
fn load_replaces_the_declared_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.net");
    let saved = trained_network();
    saved.save(&path).unwrap();

    let mut other = Network::new(NetworkConfig::new(2, 2, 2, 0.9));
    other.load(&path).unwrap();
    assert_eq!(other, saved);
}

#[test]
fn load_rejects_blob_that_disagrees_with_declared_hidden_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.net");
    Network::new(NetworkConfig::new(4, 150, 3, 0.2)).save(&path).unwrap();

    let mut record: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    record["HiddenNodes"] = Value::from(200);
    std::fs::write(&path, serde_json::to_vec(&record).unwrap()).unwrap();

    let mut net = Network::new(NetworkConfig::new(4, 200, 3, 0.2));
    assert!(matches!(net.load(&path), Err(NetError::Decoding(_))));
}

#[test]
fn load_reports_missing_and_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut net = Network::new(NetworkConfig::new(2, 2, 2, 0.1));

    assert!(matches!(net.load(dir.path().join("missing.net")), Err(NetError::Io(_))));

    let path = dir.path().join("corrupt.net");
    std::fs::write(&path, b"{\"InputNodes\": 2, \"HiddenNodes\": ").unwrap();
    assert!(matches!(net.load(&path), Err(NetError::Decoding(_))));

    let saved = Network::new(NetworkConfig::new(2, 2, 2, 0.1));
    let mut record = SerializedModel::encode(saved.config(), saved.w_input_hidden(), saved.w_hidden_output());
    record.raw_hidden_output.truncate(10);
    std::fs::write(&path, record.to_json().unwrap()).unwrap();
    assert!(matches!(net.load(&path), Err(NetError::Decoding(_))));
}

#[test]
fn load_rejects_blob_with_zero_columns_and_huge_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.net");
    let saved = Network::new(NetworkConfig::new(2, 2, 2, 0.1));
    let mut record = SerializedModel::encode(saved.config(), saved.w_input_hidden(), saved.w_hidden_output());

    let mut blob = b"DNM1".to_vec();
    blob.extend_from_slice(&u64::MAX.to_le_bytes());
    blob.extend_from_slice(&0u64.to_le_bytes());
    record.raw_hidden_output = blob;
    record.write_file(&path).unwrap();

    let mut net = Network::new(NetworkConfig::new(2, 2, 2, 0.1));
    assert!(matches!(net.load(&path), Err(NetError::Decoding(_))));
    assert!(matches!(Network::from_file(&path), Err(NetError::Decoding(_))));
}
