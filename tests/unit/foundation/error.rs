use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MazeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MazeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(MazeError::render("x").to_string().contains("render error:"));
}

#[test]
fn solver_failures_name_their_location() {
    let stall = MazeError::StallDetected { x: 3, y: 4 }.to_string();
    assert!(stall.contains("(3, 4)"));

    let limit = MazeError::StepLimitExceeded { limit: 100 }.to_string();
    assert!(limit.contains("100"));

    let oob = MazeError::out_of_bounds(-1, 2, 5, 5).to_string();
    assert!(oob.contains("(-1, 2)"));
    assert!(oob.contains("5x5"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MazeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
