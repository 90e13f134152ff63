use crate::core::data::complex::Complex;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Leaf,
    Sub { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
}

#[derive(Debug, Clone, Copy)]
struct Node {
    value: Complex,
    operation: Operation,
}

/// Arena of recorded complex operations for reverse-mode differentiation.
///
/// Nodes are appended in evaluation order, so every operand id is smaller than
/// the id of the node using it and a single reverse sweep visits each node after
/// all of its consumers. `clear` keeps the allocation for the next record.
#[derive(Debug, Default)]
pub struct Tape {
    nodes: Vec<Node>,
    adjoints: Vec<Complex>,
}

impl Tape {
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.adjoints.clear();
    }

    pub fn leaf(&mut self, value: Complex) -> NodeId {
        self.push(value, Operation::Leaf)
    }

    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let value = self.value(lhs) - self.value(rhs);
        self.push(value, Operation::Sub { lhs, rhs })
    }

    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let value = self.value(lhs) * self.value(rhs);
        self.push(value, Operation::Mul { lhs, rhs })
    }

    #[must_use]
    pub fn value(&self, id: NodeId) -> Complex {
        self.nodes[id].value
    }

    /// Seeds `output` with a unit sensitivity and sweeps backward, returning
    /// `d output / d wrt`.
    ///
    /// Complex multiplication is holomorphic, so the adjoint reaching an operand
    /// of a product is the incoming adjoint times the other operand.
    pub fn gradient(&mut self, output: NodeId, wrt: NodeId) -> Complex {
        self.adjoints.clear();
        self.adjoints.resize(self.nodes.len(), Complex::ZERO);
        self.adjoints[output] = Complex::ONE;

        for id in (0..=output).rev() {
            let adjoint = self.adjoints[id];

            match self.nodes[id].operation {
                Operation::Leaf => {}
                Operation::Sub { lhs, rhs } => {
                    self.adjoints[lhs] = self.adjoints[lhs] + adjoint;
                    self.adjoints[rhs] = self.adjoints[rhs] - adjoint;
                }
                Operation::Mul { lhs, rhs } => {
                    let lhs_value = self.nodes[lhs].value;
                    let rhs_value = self.nodes[rhs].value;
                    self.adjoints[lhs] = self.adjoints[lhs] + adjoint * rhs_value;
                    self.adjoints[rhs] = self.adjoints[rhs] + adjoint * lhs_value;
                }
            }
        }

        self.adjoints[wrt]
    }

    fn push(&mut self, value: Complex, operation: Operation) -> NodeId {
        self.nodes.push(Node { value, operation });
        self.nodes.len() - 1
    }
}
