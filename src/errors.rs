// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at everything `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        DocOptFailure(::docopt::Error);
    }

    errors {
        InvalidMaze(reason: String) {
            description("invalid maze layout")
            display("Invalid maze layout: {}", reason)
        }
        InvalidSideLength(side: usize) {
            description("invalid maze side length")
            display("Invalid maze side length {}, it must be at least 1", side)
        }
        InvalidArgument(arg: String) {
            description("invalid argument")
            display("Invalid argument '{}'", arg)
        }
        NotAFile(path: String) {
            description("path is not a file")
            display("Please enter path to a json maze file, '{}' is not a file", path)
        }
        NoSolution {
            description("no solution found")
            display("No solution found, the end cell is unreachable from the start cell")
        }
        IterationCapExceeded(cap: usize) {
            description("iteration cap exceeded")
            display("Gave up searching after {} iterations", cap)
        }
    }
}
