use super::*;

struct Chain {
    next: Option<Box<Chain>>,
}

fn chain(depth: usize) -> Chain {
    let mut head = Chain { next: None };
    for _ in 0..depth {
        head = Chain {
            next: Some(Box::new(head)),
        };
    }
    head
}

fn depth_of(link: &Chain) -> usize {
    ensure_sufficient_stack(|| match &link.next {
        Some(next) => depth_of(next) + 1,
        None => 0,
    })
}

fn unlink(mut link: Chain) {
    // Drop iteratively so the test itself cannot overflow on teardown.
    while let Some(next) = link.next.take() {
        link = *next;
    }
}

#[test]
fn test_shallow_chain() {
    let c = chain(10);
    assert_eq!(depth_of(&c), 10);
    unlink(c);
}

#[test]
fn test_deep_chain() {
    // Far deeper than a 2MB test thread stack allows without growth.
    let c = chain(200_000);
    assert_eq!(depth_of(&c), 200_000);
    unlink(c);
}

#[test]
fn test_returns_closure_result() {
    let result: Result<u32, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
