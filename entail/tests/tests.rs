use entail::cnf::{self, dissociate, is_cnf, to_cnf};
use entail::parse::{parse, parse_all};
use entail::{bc, dpll, fc, tt};
use entail::{pl_true, Evidence, Expr, KnowledgeBase, Method, Model, OpA, Symbol};
use proptest::prelude::*;

fn expr(s: &str) -> Expr {
    parse(s).unwrap()
}

fn model(assignment: &[(&str, bool)]) -> Model {
    assignment.iter().map(|(s, v)| (Symbol::new(s), *v)).collect()
}

fn names(syms: &[Symbol]) -> Vec<&str> {
    syms.iter().map(|s| s.name()).collect()
}

/// All total models over the given symbols.
fn models(symbols: &[Symbol]) -> Vec<Model> {
    match symbols.split_first() {
        None => Vec::from([Model::new()]),
        Some((p, rest)) => {
            let ms = models(rest);
            let t = ms.iter().map(|m| m.extend(p.clone(), true));
            let f = ms.iter().map(|m| m.extend(p.clone(), false));
            t.chain(f).collect()
        }
    }
}

#[test]
fn umbrella() {
    let kb = parse_all(["It_is_raining & ~I_have_an_umbrella => I_get_wet", "It_is_raining"]);
    let verdict = Method::Tt.entails(&kb.unwrap(), &expr("I_get_wet")).unwrap();
    assert!(!verdict.entailed);
}

#[test]
fn chaining_trace() {
    let kb = parse_all([
        "p2=>p3",
        "p3=>p1",
        "c=>e",
        "b&e=>f",
        "f&g=>h",
        "p2&p1&p3=>d",
        "p1&p3=>c",
        "a",
        "b",
        "p2",
    ])
    .unwrap();
    let fc = Method::Fc.entails(&kb, &expr("d")).unwrap();
    assert!(fc.entailed);
    let derived = ["a", "b", "p2", "p3", "p1", "d"].map(Symbol::new);
    assert_eq!(fc.evidence, Evidence::Derived(Vec::from(derived)));

    let kb = KnowledgeBase::new(kb).unwrap();
    let (entailed, derived) = bc::bc_entails(&kb, &expr("d")).unwrap();
    assert!(entailed);
    assert_eq!(names(&derived), ["p2", "p3", "p1", "d"]);

    assert!(!fc::fc_entails(&kb, &expr("h")).unwrap().0);
    assert!(!bc::bc_entails(&kb, &expr("h")).unwrap().0);
    assert!(fc::fc_entails(&kb, &expr("f & c")).unwrap().0);
}

#[test]
fn disjunction() {
    let kb = [expr("P || Q")];
    assert!(!Method::Tt.entails(&kb, &expr("Q")).unwrap().entailed);
    assert!(!Method::Dpll.entails(&kb, &expr("Q")).unwrap().entailed);
    assert!(Method::Tt.entails(&kb, &expr("Q || P")).unwrap().entailed);
}

#[test]
fn conjunction() {
    let kb = [expr("A&(B||C)&D&E&~(F||G)")];
    let query = expr("A&D&E&~F&~G");
    assert!(Method::Tt.entails(&kb, &query).unwrap().entailed);
    assert!(Method::Dpll.entails(&kb, &query).unwrap().entailed);
    assert!(!Method::Tt.entails(&kb, &expr("B")).unwrap().entailed);
}

#[test]
fn counter_model() {
    let verdict = Method::Dpll.entails(&[expr("A")], &expr("~A")).unwrap();
    assert!(!verdict.entailed);
    let witness = model(&[("A", true)]);
    assert_eq!(verdict.evidence, Evidence::Witness(Some(witness)));
}

#[test]
fn eval() {
    let m1 = model(&[("a", false), ("b", true)]);
    assert_eq!(pl_true(&expr("a || b"), &m1), Some(true));

    let fm = expr("(magical & horned) ==> mythical");
    let m2 = model(&[("magical", true), ("mythical", false), ("horned", true)]);
    assert_eq!(pl_true(&fm, &m2), Some(false));

    let fm = expr("((smoke & heat) ==> fire) <=> ((smoke ==> fire) || (heat ==> fire))");
    let m3 = model(&[("smoke", false), ("heat", false), ("fire", false)]);
    assert_eq!(pl_true(&fm, &m3), Some(true));

    assert_eq!(pl_true(&expr("a & c"), &m1), Some(false));
    assert_eq!(pl_true(&expr("b & c"), &m1), None);
}

#[test]
fn cnf_stages() {
    use cnf::{distribute_and_over_or, eliminate_implications, move_not_inwards};

    let eliminated = |s| eliminate_implications(expr(s));
    assert_eq!(eliminated("a <=> b"), expr("(~a || b) & (~b || a)"));
    assert_eq!(eliminated("a => b"), expr("~a || b"));
    assert_eq!(eliminated("((~a & b) || c) => d"), expr("~((~a & b) || c) || d"));

    let nnf = |s| move_not_inwards(expr(s));
    assert_eq!(nnf("~(~a)"), expr("a"));
    assert_eq!(nnf("~(a & b)"), expr("~a || ~b"));
    assert_eq!(nnf("~(a || b)"), expr("~a & ~ b"));

    let distributed = |s| distribute_and_over_or(expr(s));
    assert_eq!(distributed("(a & b) || c"), expr("(a || c) & (b || c)"));
    let expected = expr("((a => (b & c)) || (b <=> d)) & (d || (b <=> d))");
    assert_eq!(distributed("((a => (b & c)) & d) || (b <=> d)"), expected);

    assert_eq!(to_cnf(expr("~(b || c)")), expr("~b & ~c"));
    assert_eq!(to_cnf(expr("a || (b & c)")), expr("(b || a) & (c || a)"));
}

#[test]
fn flattening() {
    let (a, b, c) = (expr("a"), expr("b"), expr("c"));
    let nested = Expr::BinA(OpA::Conj, Vec::from([a.clone(), b.clone()]));
    let fms = Vec::from([nested, expr("b || c"), Expr::BinA(OpA::Conj, Vec::from([b, c]))]);
    let flat = dissociate(OpA::Conj, fms.clone());
    assert_eq!(flat, [a, expr("b"), expr("b || c"), expr("b"), expr("c")]);
    let assoc = cnf::associate(OpA::Conj, fms);
    assert_eq!(assoc, Expr::BinA(OpA::Conj, flat));
}

#[test]
fn horn_knowledge_base() {
    // (My => I) & (~My => ~I & Mam) & ((I || Mam) => H) & (H => Ma)
    let kb = parse_all(["My => I", "~My => ~I & Mam", "I || Mam => H", "H => Ma"]).unwrap();
    for q in ["H", "Ma"] {
        assert!(Method::Tt.entails(&kb, &expr(q)).unwrap().entailed);
        assert!(Method::Dpll.entails(&kb, &expr(q)).unwrap().entailed);
    }
    assert!(!Method::Tt.entails(&kb, &expr("My")).unwrap().entailed);
    // not a set of definite clauses
    assert!(Method::Fc.entails(&kb, &expr("H")).is_err());
}

fn arb_symbol() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Vec::from(["a", "b", "c", "d"]))
}

fn arb_expr(depth: u32) -> BoxedStrategy<Expr> {
    if depth == 0 {
        arb_symbol().prop_map(Expr::symbol).boxed()
    } else {
        let sub = || arb_expr(depth - 1);
        prop_oneof![
            arb_symbol().prop_map(Expr::symbol),
            sub().prop_map(|fm| -fm),
            (sub(), sub()).prop_map(|(l, r)| l & r),
            (sub(), sub()).prop_map(|(l, r)| l | r),
            (sub(), sub()).prop_map(|(l, r)| Expr::imp(l, r)),
            (sub(), sub()).prop_map(|(l, r)| Expr::iff(l, r)),
        ]
        .boxed()
    }
}

fn arb_definite_clause() -> impl Strategy<Value = Expr> {
    let fact = arb_symbol().prop_map(Expr::symbol);
    let premises = prop::collection::vec(arb_symbol().prop_map(Expr::symbol), 1..=3);
    let rule = (premises, arb_symbol()).prop_map(|(ps, c)| {
        let premises = Expr::conjoin(ps).unwrap();
        Expr::imp(premises, Expr::symbol(c))
    });
    prop_oneof![fact, rule]
}

fn arb_horn_kb() -> impl Strategy<Value = Vec<Expr>> {
    prop::collection::vec(arb_definite_clause(), 0..=8)
}

proptest! {
    #[test]
    fn cnf_preserves_semantics(fm in arb_expr(2)) {
        let cnf = to_cnf(fm.clone());
        let symbols: Vec<_> = fm.get_symbols().into_iter().collect();
        for m in models(&symbols) {
            prop_assert_eq!(pl_true(&fm, &m), pl_true(&cnf, &m));
        }
    }

    #[test]
    fn cnf_has_literal_form(fm in arb_expr(2)) {
        prop_assert!(is_cnf(&to_cnf(fm)));
    }

    #[test]
    fn dissociate_idempotent(fms in prop::collection::vec(arb_expr(2), 0..4)) {
        for op in [OpA::Conj, OpA::Disj] {
            let once = dissociate(op, fms.clone());
            prop_assert_eq!(dissociate(op, once.clone()), once);
        }
    }

    #[test]
    fn tt_dpll_agree(kb in arb_expr(2), query in arb_expr(2)) {
        let (entailed, witness) = dpll::dpll_entails(&kb, &query);
        prop_assert_eq!(tt::tt_entails(&kb, &query).0, entailed);
        if let Some(m) = witness {
            prop_assert_eq!(pl_true(&(kb & -query), &m), Some(true));
        }
    }

    #[test]
    fn fc_bc_agree(kb in arb_horn_kb(), query in arb_symbol()) {
        let kb = KnowledgeBase::new(kb).unwrap();
        let query = Expr::symbol(query);
        let (fc, _) = fc::fc_entails(&kb, &query).unwrap();
        let (bc, _) = bc::bc_entails(&kb, &query).unwrap();
        prop_assert_eq!(fc, bc);
        prop_assert_eq!(fc, tt::tt_entails(&kb.sentence(), &query).0);
    }

    #[test]
    fn fc_monotone(kb in arb_horn_kb(), extra in arb_definite_clause(), query in arb_symbol()) {
        let query = Expr::symbol(query);
        let small = KnowledgeBase::new(kb.clone()).unwrap();
        let mut kb = kb;
        kb.push(extra);
        let large = KnowledgeBase::new(kb).unwrap();
        if fc::fc_entails(&small, &query).unwrap().0 {
            prop_assert!(fc::fc_entails(&large, &query).unwrap().0);
        }
    }
}
