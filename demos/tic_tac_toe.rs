//! Tic-Tac-Toe Controller
//!
//! This demo describes the control FSM of a two-player grid-placement game
//! with three piece sizes and win detection, then compiles it.
//!
//! Key concepts:
//! - Vector attributes (one register read per button case)
//! - Binary branches on `rb_data`
//! - Generated chains of win-check states
//! - Diagram and description output
//!
//! Run with: cargo run --example tic_tac_toe [OUTPUT_DIR]

use lucid_fsm::core::{StateMachine, StateOutput, TransitionRule};
use lucid_fsm::description::MachineDescription;
use lucid_fsm::{DotGraph, EmitterConfig, Signal};
use std::path::PathBuf;

const SIZES: [&str; 3] = ["small", "med", "large"];

struct Player {
    id: u8,
    /// Literal stored for each piece size.
    size_codes: [&'static str; 3],
    /// Guard that holds while a checked box does not belong to this player.
    miss: &'static str,
    other: u8,
}

const P1: Player = Player {
    id: 1,
    size_codes: ["1", "5", "9"],
    miss: "rb_data == 0",
    other: 2,
};

const P2: Player = Player {
    id: 2,
    size_codes: ["2", "6", "10"],
    miss: "rb_data == 1",
    other: 1,
};

fn check_output() -> StateOutput {
    StateOutput::new()
        .ra("regfile_addr.box_addr")
        .rb("regfile_addr.temp4")
        .rc("regfile_addr.temp4")
        .literal("2")
        .bsel("1")
        .alufn("alu_op_code.mod")
        .we("1")
}

/// Rule for the `i`th box of a three-box line: read the first box, then
/// bail to `next_line` on a miss, otherwise continue; a full line wins.
fn line_rule(
    p: &Player,
    i: usize,
    next_box: impl FnOnce() -> String,
    next_line: &str,
) -> TransitionRule {
    match i {
        0 => TransitionRule::always(next_box()),
        1 => TransitionRule::branch(p.miss, next_line, next_box()),
        _ => TransitionRule::branch(p.miss, next_line, format!("HAS_P{}_WON", p.id)),
    }
}

fn add_turn(machine: &mut StateMachine, p: &Player) {
    let id = p.id;

    machine.add_state(
        format!("SELECT_BOX_P{id}"),
        StateOutput::new()
            .ra(
                (0..3)
                    .flat_map(|y| (0..3).map(move |x| format!("regfile_addr.box{y}{x}")))
                    .collect::<Vec<_>>(),
            )
            .label_for(Signal::ReadA, "0x00-0x09")
            .rc("regfile_addr.box_addr")
            .alufn("alu_op_code.t_a")
            .we("1"),
        Some(
            TransitionRule::new(
                (1..=9).map(|b| format!("button_{b}")).collect::<Vec<_>>(),
                format!("SELECT_SIZE_P{id}"),
            )
            .with_label(" buttons 1-9 pressed"),
        ),
    );

    let mut reads: Vec<String> = SIZES
        .iter()
        .map(|size| format!("regfile_addr.pieces_remaining_{size}_p{id}"))
        .collect();
    reads.push("0".to_string());
    let mut targets: Vec<String> = SIZES
        .iter()
        .map(|size| format!("CHECK_SIZE_{}_P{id}", size.to_uppercase()))
        .collect();
    targets.push(format!("SELECT_BOX_P{id}"));

    machine.add_state(
        format!("SELECT_SIZE_P{id}"),
        StateOutput::new()
            .asel("1")
            .rb(reads)
            .label_for(Signal::ReadB, "0x09-0x0D/0")
            .rc([
                "regfile_addr.temp1",
                "regfile_addr.temp1",
                "regfile_addr.temp1",
                "regfile_addr.box_addr",
            ])
            .label_for(Signal::WriteAddr, "regfile_addr.temp1/box_addr")
            .alufn(["alu_op_code.lt", "alu_op_code.lt", "alu_op_code.lt", "alu_op_code.t_a"])
            .label_for(Signal::AluFn, "alu_op_code.lt/t_a")
            .we("1"),
        Some(TransitionRule::new(
            ["button_a", "button_b", "button_c", "button_d"],
            targets,
        )),
    );

    for (size, code) in SIZES.iter().zip(p.size_codes) {
        machine.add_state(
            format!("CHECK_SIZE_{}_P{id}", size.to_uppercase()),
            StateOutput::new()
                .literal(code)
                .bsel("1")
                .rb("regfile_addr.temp1")
                .rc(format!("regfile_addr.selected_size_p{id}"))
                .alufn("alu_op_code.t_b")
                .we("rb_data[0]"),
            Some(TransitionRule::branch(
                "rb_data == 0",
                format!("SELECT_BOX_P{id}"),
                format!("VALIDATE_PLACEMENT_P{id}_PT1"),
            )),
        );
    }

    machine.add_state(
        format!("VALIDATE_PLACEMENT_P{id}_PT1"),
        StateOutput::new()
            .ra("rb_data[4:0]")
            .rb("regfile_addr.box_addr")
            .rc("regfile_addr.temp2")
            .alufn("alu_op_code.t_a")
            .we("1"),
        Some(TransitionRule::always(format!("VALIDATE_PLACEMENT_P{id}_PT2"))),
    );
    machine.add_state(
        format!("VALIDATE_PLACEMENT_P{id}_PT2"),
        StateOutput::new()
            .ra(format!("regfile_addr.selected_size_p{id}"))
            .rb("regfile_addr.temp2")
            .rc("regfile_addr.temp3")
            .alufn("alu_op_code.sub")
            .we("1"),
        Some(TransitionRule::always(format!("VALIDATE_PLACEMENT_P{id}_PT3"))),
    );
    machine.add_state(
        format!("VALIDATE_PLACEMENT_P{id}_PT3"),
        StateOutput::new()
            .ra("regfile_addr.temp3")
            .literal("2")
            .bsel("1")
            .rc("regfile_addr.temp3")
            .alufn("alu_op_code.ltq")
            .we("1"),
        Some(TransitionRule::always(format!("VALIDATE_PLACEMENT_P{id}_PT4"))),
    );
    machine.add_state(
        format!("VALIDATE_PLACEMENT_P{id}_PT4"),
        StateOutput::new().rb("regfile_addr.temp3"),
        Some(TransitionRule::branch(
            "rb_data == 0",
            format!("PLACE_PIECE_P{id}"),
            format!("SELECT_BOX_P{id}"),
        )),
    );

    machine.add_state(
        format!("PLACE_PIECE_P{id}"),
        StateOutput::new()
            .ra("regfile_addr.box_addr")
            .rb(format!("regfile_addr.selected_size_p{id}"))
            .ra2sel("1")
            .label_for(Signal::AluFn, "alu_op_code.t_b")
            .we("1"),
        Some(TransitionRule::always(format!("COMPLETE_ROW_0_CHECK_BOX_00_P{id}"))),
    );

    add_win_checks(machine, p);

    machine.add_state(
        format!("HAS_P{id}_WON"),
        StateOutput::new().rb("regfile_addr.temp4"),
        Some(TransitionRule::branch(
            p.miss,
            format!("SELECT_BOX_P{}", p.other),
            format!("DECLARE_P{id}_WINNER"),
        )),
    );
}

fn add_win_checks(machine: &mut StateMachine, p: &Player) {
    let id = p.id;
    let row = |j: usize, i: usize| format!("COMPLETE_ROW_{j}_CHECK_BOX_{j}{i}_P{id}");
    let col = |j: usize, i: usize| format!("COMPLETE_COL_{j}_CHECK_BOX_{j}{i}_P{id}");
    let dia0 = |i: usize| format!("COMPLETE_DIA_0_CHECK_BOX_{i}{i}_P{id}");
    let dia1 = |i: usize| format!("COMPLETE_DIA_1_CHECK_BOX_{}{i}_P{id}", 2 - i);

    for j in 0..3 {
        for i in 0..3 {
            let next_line = if j < 2 { row(j + 1, 0) } else { col(0, 0) };
            machine.add_state(
                row(j, i),
                check_output(),
                Some(line_rule(p, i, || row(j, i + 1), &next_line)),
            );
        }
    }

    for i in 0..3 {
        for j in 0..3 {
            let next_line = if j < 2 { col(j + 1, 0) } else { dia0(0) };
            machine.add_state(
                col(j, i),
                check_output(),
                Some(line_rule(p, i, || col(j, i + 1), &next_line)),
            );
        }
    }

    for i in 0..3 {
        machine.add_state(
            dia0(i),
            check_output(),
            Some(line_rule(p, i, || dia0(i + 1), &dia1(0))),
        );
    }

    for i in 0..3 {
        machine.add_state(
            dia1(i),
            check_output(),
            Some(line_rule(
                p,
                i,
                || dia1(i + 1),
                &format!("SELECT_BOX_P{}", p.other),
            )),
        );
    }
}

fn build() -> StateMachine {
    let mut machine = StateMachine::new();

    machine.add_state(
        "START",
        StateOutput::new().start("1"),
        Some(
            TransitionRule::new("|c{button_0, button_asterisk, button_hash}", "SELECT_BOX_P1")
                .with_label(" 0, * or # pressed"),
        ),
    );

    add_turn(&mut machine, &P1);
    add_turn(&mut machine, &P2);

    for (id, literal) in [(1, "1"), (2, "2")] {
        machine.add_state(
            format!("DECLARE_P{id}_WINNER"),
            StateOutput::new()
                .literal(literal)
                .bsel("1")
                .rc("regfile_addr.winner")
                .label_for(Signal::AluFn, "alu_op_code.t_b")
                .we("1")
                .finished("1"),
            Some(TransitionRule::always("END")),
        );
    }

    machine.add_state(
        "END",
        StateOutput::new().finished("1"),
        Some(
            TransitionRule::new("|c{button_0, button_asterisk, button_hash}", "START")
                .with_label(" 0, * or # pressed"),
        ),
    );

    machine
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tic-Tac-Toe Controller ===\n");

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let machine = build();
    println!("Described {} states", machine.len());

    if let Err(dangling) = lucid_fsm::validate::dangling_targets(&machine) {
        for target in dangling {
            println!("warning: {}", target);
        }
    }

    let config = EmitterConfig::default();
    let code = machine.compile_with(&config)?;
    std::fs::write(out_dir.join("fsm_cases.luc"), &code)?;
    println!("Wrote fsm_cases.luc ({} lines)", code.lines().count());

    let mut graph = DotGraph::default();
    machine.render_diagram(&mut graph)?;
    std::fs::write(out_dir.join("fsm.gv"), graph.to_string())?;
    println!("Wrote fsm.gv");

    MachineDescription::from_machine(&machine, config).save(out_dir.join("fsm.json"))?;
    println!("Wrote fsm.json");

    println!("\n=== Example Complete ===");
    Ok(())
}
