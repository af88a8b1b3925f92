use terrain_robot::{Direction, Terrain};

const HEX_TERRAIN: &str = "46B E59  EA C1F 45E  63
899 FFF 926 7AD C4E FFF
E2E 323 6D2 976 83F C96
9E9 A8B 9C1 461 F74 D05
EDD E94 5F4 D1D D03 DE3
 89 925 CF9 CA0 F18 4D2";

#[test]
fn route_through_hex_terrain() {
    let terrain = Terrain::load(HEX_TERRAIN).unwrap();
    let route = terrain.min_cost_route();
    assert_eq!(route.moves_text(), "r,r,d,d,r,d,d,r,r,d");
    assert_eq!(route.cost_text(), "0x59e7");
}

#[test]
fn route_takes_detour_through_cheap_nodes() {
    let terrain = Terrain::load(
        "1 100 1 1 1\n1 1 1 100 1\n100 100 100 1 1\n100 100 100 1 100\n100 100 100 1 1",
    )
    .unwrap();
    let route = terrain.min_cost_route();
    assert_eq!(route.cost(), 12);
    assert_eq!(route.cost_text(), "0xc");
    assert_eq!(route.moves_text(), "d,r,r,u,r,r,d,d,l,d,d,r");
}

#[test]
fn route_walks_straight_through_single_row_terrain() {
    let terrain = Terrain::load("1 100 100 100 1").unwrap();
    let route = terrain.min_cost_route();
    assert_eq!(route.cost_text(), "0x301");
    assert_eq!(route.moves_text(), "r,r,r,r");
}

#[test]
fn route_through_zero_cost_terrain() {
    let terrain = Terrain::load("0 0 0\n0 0 0\n0 0 0").unwrap();
    let route = terrain.min_cost_route();
    assert_eq!(route.cost_text(), "0x0");
    assert_eq!(route.moves().len(), 4);
    let right_n = route
        .moves()
        .iter()
        .filter(|dir| **dir == Direction::Right)
        .count();
    let down_n = route
        .moves()
        .iter()
        .filter(|dir| **dir == Direction::Down)
        .count();
    assert_eq!(right_n, 2);
    assert_eq!(down_n, 2);
}

#[test]
fn route_excludes_start_weight() {
    let terrain = Terrain::load("9 1\n1 1").unwrap();
    let route = terrain.min_cost_route();
    assert_eq!(route.cost(), 2);
    assert_eq!(route.cost_text(), "0x2");
}

#[test]
fn route_is_deterministic() {
    let terrain = Terrain::load(HEX_TERRAIN).unwrap();
    let first = terrain.min_cost_route();
    let second = terrain.min_cost_route();
    assert_eq!(first, second);
}
