/// Moves the item at `from` to `to`, shifting everything in between by one
/// position. Standard remove-then-insert list-move semantics, the primitive a
/// completed drag gesture reduces to.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
