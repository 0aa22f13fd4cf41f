//! Move history in Standard Algebraic Notation

/// Ordered, append-only list of SAN moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<String>,
}

/// One numbered line of the history: White's move and Black's reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    pub number: usize,
    pub white: &'a str,
    pub black: Option<&'a str>,
}

impl MoveHistory {
    /// Replace the contents with the engine's history
    ///
    /// The engine's list only ever grows between resets, so this keeps the
    /// append-only shape.
    pub fn sync_from(&mut self, engine_history: &[String]) {
        let known = self.moves.len();
        if engine_history.len() < known || engine_history[..known] != self.moves[..] {
            self.moves = engine_history.to_vec();
            return;
        }
        self.moves.extend_from_slice(&engine_history[known..]);
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&str> {
        self.moves.last().map(String::as_str)
    }

    /// Moves paired as numbered White/Black lines
    pub fn rows(&self) -> impl Iterator<Item = HistoryRow<'_>> {
        self.moves.chunks(2).enumerate().map(|(index, pair)| HistoryRow {
            number: index + 1,
            white: pair[0].as_str(),
            black: pair.get(1).map(String::as_str),
        })
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
